use pdf_field_scan::{NativePdfPicker, ScanConfig, run};
use std::io;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ScanConfig::load(Path::new("fields.json"));
    log::debug!("{} target field(s) configured", config.fields.len());

    run(&NativePdfPicker, &config.fields, &mut io::stdout())
}
