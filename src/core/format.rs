/// Renders a fee and billable weight for display, e.g. `₱2,915 (50 kg)`.
pub fn format_fee(fee: u32, bill_kg: u32) -> String {
    format!("₱{} ({} kg)", group_thousands(fee), bill_kg)
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
