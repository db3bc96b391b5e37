use clap::{Args, ValueEnum};
use sigcurve_core::signal::export::indices_to_f64;
use sigcurve_core::{BitWidth, Codec, CoordMatrix};

use crate::io::sfc::{self, SfcFile};
use crate::io::table;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CodecArg {
    Morton,
    Hilbert,
}

impl From<CodecArg> for Codec {
    fn from(c: CodecArg) -> Self {
        match c {
            CodecArg::Morton => Codec::Morton,
            CodecArg::Hilbert => Codec::Hilbert,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Layout {
    /// One sample per line, one column per signal.
    Rows,
    /// One signal per line, one column per sample.
    Columns,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutFormat {
    /// One decimal index per line.
    Text,
    /// SFC1 container (requires --out).
    Bin,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Integer coordinate table (`-` for stdin)
    #[arg(long)]
    pub r#in: String,

    /// Space-filling curve to encode with
    #[arg(long, value_enum, default_value_t = CodecArg::Morton)]
    pub codec: CodecArg,

    /// Bits per signal. Signals * bits must not exceed 64.
    ///
    /// Taken as a plain number so that values like 2.5 or 0 are reported
    /// as configuration errors rather than parse errors.
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    pub bits: f64,

    /// How the input table is laid out
    #[arg(long, value_enum, default_value_t = Layout::Rows)]
    pub layout: Layout,

    /// Output path. Text output goes to stdout when omitted.
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = OutFormat::Text)]
    pub format: OutFormat,

    /// Emit indices last-sample-first (display order for charts that plot top-down)
    #[arg(long, default_value_t = false)]
    pub reverse: bool,

    /// Fail if any index cannot be held exactly by an f64 consumer (> 2^53 - 1)
    #[arg(long, default_value_t = false)]
    pub float_safe: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let codec: Codec = args.codec.into();
    let bits = BitWidth::from_f64(args.bits)?;

    let records = table::load_table(&args.r#in)?;
    let matrix = match args.layout {
        Layout::Rows => CoordMatrix::from_rows(&records)?,
        Layout::Columns => CoordMatrix::from_columns(&records)?,
    };

    let mut indices = codec.encode(&matrix, bits.get())?;

    if args.reverse {
        indices.reverse();
    }

    if args.float_safe {
        indices_to_f64(&indices)?;
    }

    match args.format {
        OutFormat::Text => table::write_lines(args.out.as_deref(), &indices)?,
        OutFormat::Bin => {
            let Some(path) = args.out.as_deref() else {
                anyhow::bail!("--format bin requires --out");
            };
            sfc::write_sfc(
                path,
                &SfcFile {
                    codec,
                    dims: matrix.dims() as u32,
                    bits: bits.get(),
                    indices: indices.clone(),
                },
            )?;
        }
    }

    tracing::debug!(digest = %sfc::payload_digest_hex(&indices), "encoded payload");

    eprintln!(
        "encode ok: samples={} dims={} bits={} codec={} reversed={} out={}",
        matrix.len(),
        matrix.dims(),
        bits.get(),
        codec,
        args.reverse,
        args.out.as_deref().unwrap_or("<stdout>")
    );

    Ok(())
}
