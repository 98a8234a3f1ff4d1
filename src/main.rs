use {
  crate::{
    arguments::Arguments, client::Client, colormap::*, demo::Demo,
    figure::*, interface::Interface, response::*, subcommand::Subcommand,
  },
  anyhow::{anyhow, bail, Context},
  base64::{engine::general_purpose::STANDARD as BASE64, Engine as _},
  clap::Parser,
  eframe::{
    egui::{
      self, Color32, ColorImage, ComboBox, Pos2, Rect, Sense, TextureHandle,
      TextureOptions, Vec2, ViewportBuilder,
    },
    HardwareAcceleration, NativeOptions,
  },
  image::{
    imageops::{self, FilterType},
    DynamicImage, GrayImage, Rgb, RgbImage,
  },
  indicatif::{ProgressBar, ProgressStyle},
  reqwest::blocking::multipart::{Form, Part},
  serde::Deserialize,
  std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
};

mod arguments;
mod client;
mod colormap;
mod demo;
mod figure;
mod interface;
mod response;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
