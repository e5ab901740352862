use clap::{Parser, Subcommand, ValueEnum};
use mirrorname_core::DEFAULT_MAX_LENGTH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mirrorname",
    version,
    about = "Deterministic host-cluster names for objects mirrored from a virtual cluster"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive the host-cluster name of virtual-cluster objects
    Translate(TranslateArgs),
    /// Join parts with '-' into a length-bounded name
    Concat(ConcatArgs),
    /// Check names against the DNS-1123 label rules
    Check(CheckArgs),
    Version,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TranslateArgs {
    /// Translator config (YAML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Virtual cluster name
    #[arg(long, env = "MIRRORNAME_CLUSTER")]
    pub cluster: Option<String>,

    /// Host namespace receiving the mirrored objects (reported in JSON output)
    #[arg(long)]
    pub host_namespace: Option<String>,

    /// Name length budget; shortened names are one character shorter
    #[arg(long, env = "MIRRORNAME_MAX_LENGTH")]
    pub max_length: Option<usize>,

    /// Namespace of the objects in the virtual cluster; omit for cluster-scoped objects
    #[arg(short, long)]
    pub namespace: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Object names in the virtual cluster
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConcatArgs {
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, env = "MIRRORNAME_MAX_LENGTH")]
    pub max_length: usize,

    #[arg(required = true)]
    pub parts: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}
