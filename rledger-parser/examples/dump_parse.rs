use rledger_parser::parse_journal;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let filename = std::env::args().nth(1).ok_or("filename argument")?;
    let unparsed_file = std::fs::read_to_string(filename)?;

    let journal = parse_journal(&unparsed_file)?;
    dbg!(journal);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("Error: {}", e);
    }
}
