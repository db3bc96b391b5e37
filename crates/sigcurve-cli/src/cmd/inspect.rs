use clap::Args;

use crate::io::sfc;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .sfc path
    #[arg(long)]
    pub r#in: String,

    /// Also print every index to stdout, one per line
    #[arg(long, default_value_t = false)]
    pub dump: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let f = sfc::read_sfc(&args.r#in)?;

    eprintln!("--- sfc-inspect ---");
    eprintln!("file           = {}", args.r#in);
    eprintln!("sfc_ok         = true (magic + crc32 verified)");
    eprintln!("codec          = {}", f.codec);
    eprintln!("dims           = {}", f.dims);
    eprintln!("bits           = {}", f.bits);
    eprintln!("samples        = {}", f.indices.len());
    eprintln!("payload_digest = {}", sfc::payload_digest_hex(&f.indices));
    if let (Some(min), Some(max)) = (f.indices.iter().min(), f.indices.iter().max()) {
        eprintln!("index_range    = [{}, {}]", min, max);
    }

    if args.dump {
        crate::io::table::write_lines(None, &f.indices)?;
    }

    Ok(())
}
