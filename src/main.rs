#[tokio::main]
async fn main() {
    if let Err(err) = youthwell_lib::run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
