//! Table definitions. Every statement is safe to run on an existing database.

pub const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS meals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        meal_type TEXT NOT NULL,
        ingredients TEXT,
        calories INTEGER,
        protein INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shopping_list (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT,
        brand TEXT,
        spec TEXT,
        price TEXT,
        weekly_amount TEXT,
        note TEXT
    )
    "#,
    // meal_id is a weak reference: catalog deletes leave log rows and meal_name intact.
    r#"
    CREATE TABLE IF NOT EXISTS daily_meals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        meal_type TEXT NOT NULL,
        meal_id INTEGER,
        meal_name TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS weight_records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT UNIQUE NOT NULL,
        weight REAL NOT NULL,
        day INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS daily_checklist (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        item_key TEXT NOT NULL,
        checked INTEGER NOT NULL DEFAULT 0,
        UNIQUE(date, item_key)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercise_params (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        duration TEXT,
        intensity TEXT,
        distance TEXT,
        calories TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT
    )
    "#,
];
