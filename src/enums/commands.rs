use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Check the configuration for problems
    Validate,
    /// Create the backing spreadsheet tabs and headers
    InitStore,
    /// Run the analysis and admin HTTP server
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
}
