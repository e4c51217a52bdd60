use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::CommandFactory;

fn main() -> io::Result<()> {
    let cmd = swiftplot_cli::Args::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(io::Error::other)?);

    let dest_path = out_dir.join("swiftplot.1");
    fs::write(&dest_path, &buffer)?;

    // OUT_DIR is target/<profile>/build/<pkg>/out; three levels up is target/<profile>/
    if env::var("PROFILE").unwrap_or_default() == "release" {
        if let Some(release_dir) = out_dir.ancestors().nth(3) {
            fs::write(release_dir.join("swiftplot.1"), &buffer)?;
        }
    }

    println!("cargo:rerun-if-changed=crates/swiftplot-cli/src/lib.rs");
    Ok(())
}
