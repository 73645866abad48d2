pub use util::*;

use clap::Parser;

mod util;

days![d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16];

fn main() {
    days().run(&Args::parse());
}
