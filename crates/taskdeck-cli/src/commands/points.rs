//! Points computation command.

use taskdeck_core::validated_task_values;

pub fn run(importance: f64, complexity: f64) -> Result<(), Box<dyn std::error::Error>> {
    // Strict write-path validation: reject before computing anything.
    let values = validated_task_values(importance, complexity)?;
    println!("{}", values.points);
    Ok(())
}
