// example/src/main.rs

use flagext::*;
use flagext_schema::{Accessibility, RawAttribute, RawMember, RawValue};

// The same two samples, as a host would hand them over.
const SAMPLES: &str = include_str!("../samples/compilation.json");

fn main() -> Result<(), FlagExtError> {
    let mut compilation = compilation_from_json(SAMPLES)?;

    // Add a third type built in code: discrete, snake_case accessors,
    // and one member excluded from generation.
    let snake = RawAttribute::new(vec![RawValue::from("PASCAL"), RawValue::from("SNAKE")]);
    let direction = RawEnum::new("Direction", "HasFlagExtension.Sample", Accessibility::Internal)
        .with_naming(snake)
        .with_member(RawMember::new("NorthWest"))
        .with_member(RawMember::new("SouthEast"))
        .with_member(RawMember::new("Unknown").with_exclude(RawAttribute::bare()));
    compilation.enums.push(EnumDeclaration::resolved(direction));

    let out = run_pass(&compilation, &GeneratorOptions::default(), &CancellationToken::new())?;

    for unit in &out.units {
        println!("==== {} ====", unit.hint_name);
        println!("{}", unit.text);
    }

    println!("diagnostics = {}", diagnostics_to_json(&out.diagnostics)?);

    // Offer the fixes for the unknown group reference in GroupedEnum.
    for (diagnostic, fix) in out.fixes(&compilation) {
        println!("fix for {}: {}", diagnostic.id(), fix.title);
        println!("  {}", serde_json::to_string(&fix.edit)?);
    }

    Ok(())
}
