//! CSV output formatting for calculation results.

use crate::models::{SubnetRange, SubnetResult};
use itertools::Itertools;

use super::terminal::format_field;

const RESULT_HEADER: [&str; 13] = [
    "class",
    "original_mask",
    "original_cidr",
    "borrowed_bits",
    "total_subnets",
    "usable_subnets",
    "hosts_per_subnet",
    "usable_hosts",
    "new_mask",
    "new_cidr",
    "jump",
    "jump_div_8",
    "requested_subnets",
];

const RANGE_HEADER: [&str; 5] = ["index", "subnet", "first_host", "last_host", "broadcast"];

fn csv_row<T: ToString>(fields: impl IntoIterator<Item = T>) -> String {
    fields.into_iter().map(|f| format_field(f, 0)).join(",")
}

/// Header line and one data line for a result.
pub fn result_csv(r: &SubnetResult) -> String {
    let values = [
        r.class.to_string(),
        r.original_mask.clone(),
        r.original_cidr.to_string(),
        r.borrowed_bits.to_string(),
        r.total_subnets.to_string(),
        r.usable_subnets.to_string(),
        r.hosts_per_subnet.to_string(),
        r.usable_hosts.to_string(),
        r.new_mask.to_string(),
        r.new_cidr.to_string(),
        r.jump.to_string(),
        r.jump_div_8().to_string(),
        r.requested_subnets.to_string(),
    ];
    format!("{}\n{}\n", csv_row(RESULT_HEADER), csv_row(values))
}

/// Header line and one line per subnet.
pub fn ranges_csv(ranges: &[SubnetRange]) -> String {
    let mut out = format!("{}\n", csv_row(RANGE_HEADER));
    for r in ranges {
        let values = [
            r.index.to_string(),
            r.to_string(),
            r.first_host.map(|h| h.to_string()).unwrap_or_default(),
            r.last_host.map(|h| h.to_string()).unwrap_or_default(),
            r.broadcast.to_string(),
        ];
        out.push_str(&csv_row(values));
        out.push('\n');
    }
    out
}
