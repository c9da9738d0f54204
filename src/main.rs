use anyhow::Result;
use docket::app::Application;
use env_logger::Env;

#[tokio::main]
async fn main() -> Result<()> {
    // The web application itself is .env-driven; pick up the same file
    dotenvy::dotenv().ok();

    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = std::env::args().collect();
    let app = Application::new();

    if args.len() > 1 {
        app.execute_from_args(args).await
    } else {
        app.run().await
    }
}
