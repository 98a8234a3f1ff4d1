use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Arguments {
  #[clap(
    long,
    default_value = "http://127.0.0.1:8000",
    help = "Base URL of the Grad-CAM inference service"
  )]
  server: String,
  #[clap(subcommand)]
  subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    self.subcommand.run(Client::new(&self.server)?)
  }
}
