// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_document(size: usize) -> String {
    let base = "\\meta author=Bench\n# Title\n\n## Section\n\nParagraph with **bold**, *italic* and @{author}.\n\n- Bullet point\n  - Nested item\n- Another item\n\n| a | b |\n|---|---:|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Collapses nested `depth` levels deep, each indented under its parent and
/// holding a list with a fenced block in it.
#[allow(dead_code)]
pub fn generate_nested_collapses(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&nested_collapse(depth, 0));
        content.push('\n');
    }
    content
}

#[allow(dead_code)]
fn nested_collapse(remaining: usize, level: usize) -> String {
    if remaining == 0 {
        return String::new();
    }
    let pad = "  ".repeat(level);
    let inner = "  ".repeat(level + 1);
    let mut out = format!("{pad}|> Level {level}\n");
    out.push_str(&format!("{inner}Text with |f#ff0000,color| and `code`.\n\n"));
    out.push_str(&format!("{inner}1. item\n{inner}   ```\n{inner}   let x = {level};\n{inner}   ```\n"));
    out.push_str(&format!("{inner}2. next\n\n"));
    out.push_str(&nested_collapse(remaining - 1, level + 1));
    out.push_str(&format!("{pad}\\|>\n"));
    out
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let line = "Some **bold *nested* text** with `code`, $x^2$, [a link](page.html), \\*escaped\\* and |b#00ff00,highlight|.\n";
    line.repeat(lines)
}
