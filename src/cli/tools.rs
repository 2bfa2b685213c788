use encore::tools::catalog::TOOL_CATALOG;

/// Print the declared tool catalog.
pub fn tools() {
    println!("Tools");
    println!("{}", "=".repeat(40));
    for spec in TOOL_CATALOG {
        println!("  {}", spec.name);
        println!("    {}", spec.description);
        if spec.params.is_empty() {
            println!("    (no parameters)");
        }
        for param in spec.params {
            let required = if param.required { "required" } else { "optional" };
            println!(
                "    - {:<12} {:<14} {}",
                param.name,
                format!("{:?}", param.ty),
                required
            );
        }
        println!("    returns {}", spec.returns);
        println!();
    }
}
