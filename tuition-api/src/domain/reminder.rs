use rust_decimal::Decimal;

/// Delivery channel label recorded with every reminder.
pub const REMINDER_CHANNEL: &str = "SMS/Email";

/// Dispatch status label; the log only ever records sent reminders.
pub const REMINDER_STATUS_SENT: &str = "Sent";

/// Render the reminder text sent to a student. The due amount is
/// propagated as-is, so an over-paid record would show a negative figure
/// if it ever reached the sweep.
pub fn render_reminder_message(name: &str, due_amount: Decimal) -> String {
    format!(
        "Dear {name}, this is a reminder from the accounts office that your \
         tuition fee of {due_amount} is pending. Kindly make the payment at \
         the earliest. Thank you."
    )
}
