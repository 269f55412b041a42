//! Fuzz test for the classification matrix: every arbitrary scenario must
//! satisfy the invariants checked by `check_classification_invariants`.

use honggfuzz::fuzz;
use modification_command::invariant_testing::{Scenario, check_classification_invariants};

fn main() {
    loop {
        fuzz!(|scenario: Scenario| {
            check_classification_invariants(&scenario);
        });
    }
}
