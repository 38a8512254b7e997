// Debug script to exercise path relativization and edge trimming from the command line

use anyhow::{bail, Result};
use path_trim::{relativize, trim_edges, TrimSet};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [cmd, inner, outer] if cmd == "relativize" => {
            println!("=== RELATIVIZE ===");
            println!("inner:  {}", inner);
            println!("outer:  {}", outer);
            println!("suffix: {}", relativize(inner, outer));
        }
        [cmd, input, chars] if cmd == "trim" => {
            let set = TrimSet::new(chars);
            println!("=== TRIM ===");
            println!("input:   {:?}", input);
            println!("chars:   {:?}", chars);
            println!("trimmed: {:?}", trim_edges(input, &set));
        }
        _ => bail!("usage: debug-trim relativize <inner> <outer> | debug-trim trim <input> <chars>"),
    }

    Ok(())
}
