use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Info {}

impl Info {
  pub(crate) fn run(self, client: Client) -> Result {
    let info = client.info()?;

    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
  }
}
