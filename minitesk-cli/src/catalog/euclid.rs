//! Register initialization for a GCD test: clears `t0` and `t2` and loads
//! 99 into `t1`.

use minitesk_template::{MiniMips, Template};

pub struct EuclidTemplate;

impl Template for EuclidTemplate {
    fn name(&self) -> &str {
        "euclid"
    }

    fn description(&self) -> &str {
        "Initializes registers for Euclid's GCD algorithm"
    }

    fn run(&self, m: &mut MiniMips) {
        m.add(m.t0(), m.zero(), m.zero());
        m.addi(m.t1(), m.zero(), 99);
        m.add(m.t2(), m.zero(), m.zero());
    }
}
