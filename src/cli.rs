// src/cli.rs
use std::{env, fs, io::Read, path::PathBuf};

use crate::{extract, file};

pub struct Params {
    pub input: Option<PathBuf>, // None → stdin
    pub out: Option<String>,
    pub quiet: bool,
}

impl Params {
    fn new() -> Self {
        Self { input: None, out: None, quiet: false }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let html = read_input(&params)?;
    if html.trim().is_empty() {
        return Err("Input is empty; pipe or pass the saved game page source".into());
    }

    let meta = extract::extract(&html)?;
    let json = meta.to_pretty_json()?;

    if let Some(out) = &params.out {
        let default_name = join!(&meta.suggested_stem(), ".json");
        let path = file::resolve_out_path(out, &default_name)?;
        file::write_json(&path, &meta)?;
        eprintln!("Wrote {}", path.display());
        if !params.quiet {
            println!("{json}");
        }
    } else {
        println!("{json}");
    }
    Ok(())
}

fn read_input(params: &Params) -> Result<String, Box<dyn std::error::Error>> {
    match &params.input {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "-q" | "--quiet" => params.quiet = true,
            "-" => params.input = None,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            other => params.input = Some(PathBuf::from(other)),
        }
    }

    Ok(params)
}
