use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shadergraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the vertex and fragment shaders of a program.
    Compile(CompileArgs),
    /// Print the fingerprint of the generated shader pair.
    Fingerprint(FingerprintArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input program JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write `<stem>.vert` and `<stem>.frag` into this directory instead of printing.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print a JSON object with `vertex`, `fragment` and `fingerprint`.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input program JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn compile_program(path: &Path) -> anyhow::Result<shadergraph::ShaderPair> {
    let source = shadergraph::ProgramSource::from_path(path)?;
    let pool = shadergraph::ExprPool::new();
    let (program, opts) = source
        .build(&pool)
        .with_context(|| format!("build program '{}'", path.display()))?;
    let pair = program
        .assemble(&opts)
        .with_context(|| format!("generate shaders for '{}'", path.display()))?;
    Ok(pair)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let pair = compile_program(&args.in_path)?;

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let stem = args
            .in_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("program");
        for (ext, text) in [("vert", &pair.vertex), ("frag", &pair.fragment)] {
            let out = dir.join(format!("{stem}.{ext}"));
            std::fs::write(&out, text)
                .with_context(|| format!("write shader '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        return Ok(());
    }

    if args.json {
        let doc = serde_json::json!({
            "vertex": pair.vertex,
            "fragment": pair.fragment,
            "fingerprint": pair.fingerprint().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("// vertex");
        print!("{}", pair.vertex);
        println!("// fragment");
        print!("{}", pair.fragment);
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let pair = compile_program(&args.in_path)?;
    println!("{}", pair.fingerprint());
    Ok(())
}
