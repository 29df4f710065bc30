//! Builds the parameterized INSERT, SELECT, UPDATE, DELETE statements for the cars table.

/// Table holding the car resource.
pub const CARS_TABLE: &str = "cars";

/// Writable columns, in bind order.
pub const CAR_COLUMNS: [&str; 3] = ["carName", "carYear", "carImage"];

/// Quote identifier for SQLite (safe: only from constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    std::iter::once("id")
        .chain(CAR_COLUMNS)
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// CREATE TABLE for the cars table. AUTOINCREMENT keeps ids from being reused after delete.
pub fn create_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         {} INTEGER PRIMARY KEY AUTOINCREMENT, \
         {} TEXT NOT NULL, \
         {} INTEGER NOT NULL, \
         {} TEXT NOT NULL)",
        quoted(CARS_TABLE),
        quoted("id"),
        quoted(CAR_COLUMNS[0]),
        quoted(CAR_COLUMNS[1]),
        quoted(CAR_COLUMNS[2]),
    )
}

/// INSERT of the writable columns. Binds: carName, carYear, carImage.
pub fn insert() -> String {
    let cols = CAR_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let placeholders = vec!["?"; CAR_COLUMNS.len()].join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", quoted(CARS_TABLE), cols, placeholders)
}

/// SELECT every row in store order.
pub fn select_all() -> String {
    format!("SELECT {} FROM {}", select_column_list(), quoted(CARS_TABLE))
}

/// SELECT by primary key. Binds: id.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(),
        quoted(CARS_TABLE),
        quoted("id")
    )
}

/// Full-row UPDATE by primary key. Binds: carName, carYear, carImage, id.
pub fn update_by_id() -> String {
    let sets = CAR_COLUMNS
        .iter()
        .map(|c| format!("{} = ?", quoted(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {} WHERE {} = ?", quoted(CARS_TABLE), sets, quoted("id"))
}

/// DELETE by primary key. Binds: id.
pub fn delete_by_id() -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(CARS_TABLE), quoted("id"))
}
