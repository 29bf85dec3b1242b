//! Built-in dataset loaded into the store at every start.

use crate::models::{AdditionalDetails, Profile, SocialLinks};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The two seed profiles, ids `"1"` and `"2"`.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "1".into(),
            name: "John Doe".into(),
            photo: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400".into(),
            description: "Senior Software Engineer".into(),
            address: "San Francisco, CA".into(),
            lat: 37.7749,
            lng: -122.4194,
            additional_details: AdditionalDetails {
                email: Some("john@example.com".into()),
                phone: Some("+1 (555) 123-4567".into()),
                website: Some("https://johndoe.dev".into()),
                skills: Some(strings(&["React", "TypeScript", "Node.js", "AWS"])),
                bio: Some("Passionate about building scalable web applications".into()),
                experience: Some("8+ years in software development".into()),
                education: Some("MS Computer Science, Stanford University".into()),
                languages: Some(strings(&["English", "Spanish"])),
                social_links: Some(SocialLinks {
                    linkedin: Some("https://linkedin.com/in/johndoe".into()),
                    github: Some("https://github.com/johndoe".into()),
                    twitter: Some("https://twitter.com/johndoe".into()),
                }),
            },
        },
        Profile {
            id: "2".into(),
            name: "Jane Smith".into(),
            photo: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400".into(),
            description: "UX Designer".into(),
            address: "New York, NY".into(),
            lat: 40.7128,
            lng: -74.0060,
            additional_details: AdditionalDetails {
                email: Some("jane@example.com".into()),
                phone: Some("+1 (555) 987-6543".into()),
                website: Some("https://janesmith.design".into()),
                skills: Some(strings(&["UI/UX", "Figma", "User Research", "Design Systems"])),
                bio: Some("Creating beautiful and intuitive user experiences".into()),
                experience: Some("5+ years in UX design".into()),
                education: Some("BFA Design, RISD".into()),
                languages: Some(strings(&["English", "French"])),
                social_links: Some(SocialLinks {
                    linkedin: Some("https://linkedin.com/in/janesmith".into()),
                    github: None,
                    twitter: Some("https://twitter.com/janesmith".into()),
                }),
            },
        },
    ]
}
