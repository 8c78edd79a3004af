use anyhow::Context;
use std::env;
use std::fs;

fn main() -> anyhow::Result<()> {
    let path = env::args().nth(1).context("usage: dump_text <file.pdf>")?;
    let bytes = fs::read(&path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;

    for (page, text) in pages.iter().enumerate() {
        println!("=== PAGE {} ===", page + 1);
        for (i, line) in text.lines().enumerate() {
            if !line.trim().is_empty() {
                println!("{}: {:?}", i, line);
            }
        }
    }

    Ok(())
}
