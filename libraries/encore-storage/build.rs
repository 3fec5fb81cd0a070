//! Rebuild encore-storage whenever a migration file is added or edited,
//! since `sqlx::migrate!` embeds them at compile time.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
