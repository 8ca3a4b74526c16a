use clap::Parser;
use common::io::{read_edge_list, read_metis, write_edge_list, write_metis, GraphFileType};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input_type: GraphFileType,
    #[arg(long)]
    output_type: GraphFileType,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let graph = match cli.input_type {
        GraphFileType::Metis => read_metis(&cli.input)?,
        GraphFileType::EdgeList => read_edge_list(&cli.input)?,
    };

    let mut out = BufWriter::new(File::create(&cli.output)?);
    match cli.output_type {
        GraphFileType::Metis => write_metis(&mut out, &graph)?,
        GraphFileType::EdgeList => write_edge_list(&mut out, &graph)?,
    }
    Ok(())
}
