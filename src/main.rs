#[tokio::main]
async fn main() {
    meetgrid_backend::run().await;
}
