use super::*;

#[derive(Debug, Parser)]
pub(crate) struct App {
  #[clap(long, help = "Directory holding bundled demo models and images")]
  demos: Option<PathBuf>,
}

impl App {
  pub(crate) fn run(self, client: Client) -> Result {
    let demo = match self.demos {
      Some(dir) => Some(Demo::scan(&dir)?),
      None => None,
    };

    let interface = Interface::new(client, demo);

    let native_options = NativeOptions {
      centered: true,
      hardware_acceleration: HardwareAcceleration::Preferred,
      viewport: ViewportBuilder {
        inner_size: Some(egui::vec2(1080.0, 720.0)),
        ..Default::default()
      },
      ..Default::default()
    };

    eframe::run_native(
      env!("CARGO_PKG_NAME"),
      native_options,
      Box::new(|_| Ok(Box::new(interface))),
    )
    .unwrap();

    Ok(())
  }
}
