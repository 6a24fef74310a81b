use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "message-post",
    version,
    about = "Post a message to the log",
    long_about = "Post a message to the log.\n\nWhen AWS_LAMBDA_RUNTIME_API is set the binary serves API Gateway events instead of reading arguments."
)]
pub struct Cli {
    /// Message text
    #[arg(long)]
    pub message: String,
}
