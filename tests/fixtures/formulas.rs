#![allow(dead_code)]

use fltl::ltl::formula::Formula;
use rstest::fixture;

// ---
// Formula Fixtures
// ---

#[fixture]
#[once]
pub fn until_ab() -> Formula {
    Formula::until(Formula::prop('a'), Formula::prop('b'))
}

#[fixture]
#[once]
pub fn eventually_b() -> Formula {
    Formula::eventually(Formula::prop('b'))
}

#[fixture]
#[once]
pub fn eventually_b_alt() -> Formula {
    // F(phi) is equivalent to (True) U (phi)
    Formula::until(Formula::True, Formula::prop('b'))
}

#[fixture]
#[once]
pub fn always_a() -> Formula {
    Formula::always(Formula::prop('a'))
}

#[fixture]
#[once]
pub fn always_a_alt() -> Formula {
    // G(phi) is equivalent to !(F(!(phi)))
    Formula::not(Formula::eventually(Formula::not(Formula::prop('a'))))
}

#[fixture]
#[once]
pub fn request_grant() -> Formula {
    // G(r -> F(g)): every request is eventually granted
    Formula::always(Formula::implies(
        Formula::prop('r'),
        Formula::eventually(Formula::prop('g')),
    ))
}
