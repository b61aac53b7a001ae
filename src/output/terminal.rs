//! Terminal output utilities.
//!
//! Renders a calculation as colored label/value groups, the validation error list,
//! and an optional table of subnets.

use crate::models::{SubnetRange, SubnetResult};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Group digits in thousands, e.g. `2097152` -> `2,097,152`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {} {}\n", format!("{label}:").bold(), value)
}

/// Render a result as five groups of label/value pairs.
pub fn format_result(r: &SubnetResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Calculation results".on_green()));

    out.push_str(&format!("{}\n", "Address".blue()));
    out.push_str(&line("Class", r.class));
    out.push_str(&line("Original mask", &r.original_mask));

    out.push_str(&format!("{}\n", "Subnets".cyan()));
    out.push_str(&line("Borrowed bits", r.borrowed_bits));
    out.push_str(&line("Subnets", group_thousands(r.total_subnets)));

    out.push_str(&format!("{}\n", "Sizes".yellow()));
    out.push_str(&line("Usable subnets", group_thousands(r.usable_subnets)));
    out.push_str(&line(
        "IPs per subnet",
        format!(
            "{}(1) = {}",
            group_thousands(r.hosts_per_subnet),
            group_thousands(r.usable_hosts)
        ),
    ));

    out.push_str(&format!("{}\n", "Mask".green()));
    out.push_str(&line("Usable IPs per subnet", group_thousands(r.usable_hosts)));
    out.push_str(&line("New mask", format!("{} (/{})", r.new_mask, r.new_cidr)));

    out.push_str(&format!("{}\n", "Jump".magenta()));
    out.push_str(&line("Jump", format!("{}/8={}", r.jump, r.jump_div_8())));
    out.push_str(&line("Requested subnets", r.requested_subnets));

    out.push_str("  (1) minus network and broadcast address\n");
    out
}

/// Render validation errors as a bullet list.
pub fn format_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}\n", "•".red(), e.red()))
        .collect()
}

/// Render enumerated subnets as an aligned table.
pub fn format_ranges(ranges: &[SubnetRange], total: u64) -> String {
    let mut out = format!(
        "{:>6} {:>20} {:>17} {:>17} {:>17}\n",
        "#", "subnet", "first_host", "last_host", "broadcast"
    );
    for r in ranges {
        out.push_str(&format!(
            "{:>6} {:>20} {:>17} {:>17} {:>17}\n",
            r.index,
            r.to_string(),
            r.first_host.map_or("-".to_string(), |h| h.to_string()),
            r.last_host.map_or("-".to_string(), |h| h.to_string()),
            r.broadcast.to_string(),
        ));
    }
    if (ranges.len() as u64) < total {
        out.push_str(&format!(
            "{} showing {} of {} subnets\n",
            "NOTE".on_red(),
            ranges.len(),
            group_thousands(total)
        ));
    }
    out
}
