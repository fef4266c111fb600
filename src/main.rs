use tao_live_check_api::{CheckInfo, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let body = CheckInfo::reqwest().fetch().await?;
    println!("{body}");
    Ok(())
}
