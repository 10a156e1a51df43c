use borocast_core::EXAMPLE_COMPLAINTS;

pub fn run() {
    println!("Quick complaint examples:\n");
    for (i, text) in EXAMPLE_COMPLAINTS.iter().enumerate() {
        println!("  {}. {text}", i + 1);
    }
    println!("\nTry: borocast predict \"{}\"", EXAMPLE_COMPLAINTS[0]);
}
