#[tokio::main]
async fn main() {
    if let Err(e) = profile_map_lib::run().await {
        eprintln!("profile-map: {e}");
        std::process::exit(1);
    }
}
