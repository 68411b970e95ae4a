use anyhow::Result;

use fleet::fleet::Fleet;

use crate::render;

const RECENT_LIMIT: usize = 5;

pub fn cmd_summary(fleet: &Fleet) -> Result<()> {
    println!("{}", render::summary(&fleet.summary()));
    if !fleet.is_empty() {
        println!();
        println!("{}", render::recent(fleet.vehicles(), RECENT_LIMIT));
    }
    Ok(())
}
