use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    bsondb::cli::run().await
}
