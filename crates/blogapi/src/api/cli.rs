#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the blog API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "BLOGAPI_PORT", default_value = "9090")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BLOGAPI_HOST", default_value = "localhost")]
    pub host: String,
}
