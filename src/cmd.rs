//! Command line arguments.

use crate::processing::SubnetForm;
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "subnet-calculator")]
#[command(about = "Split an IPv4 network into equal-size subnets.")]
pub struct CommandLine {
    /// IPv4 address, e.g. 192.168.1.1
    #[arg(short, long, default_value = "12.3.2.5")]
    pub ip: String,
    /// Subnet mask in dotted form, e.g. 255.255.255.0
    #[arg(short, long, default_value = "255.0.0.0")]
    pub mask: String,
    /// Number of subnets wanted
    #[arg(short, long, default_value = "5", allow_hyphen_values = true)]
    pub subnets: String,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
    /// List the subnets, optionally only the first N (default from SUBNET_CALC_LIST_LIMIT)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "0")]
    pub list: Option<usize>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn form(&self) -> SubnetForm {
        SubnetForm {
            ip: self.ip.clone(),
            mask: self.mask.clone(),
            desired_subnets: self.subnets.clone(),
        }
    }

    /// Number of subnets to list, `None` when listing was not asked for.
    pub fn list_limit(&self, default_limit: usize) -> Option<usize> {
        self.list
            .map(|n| if n == 0 { default_limit } else { n })
    }
}
