use chrono::Utc;
use hijri::{gregorian_to_hijri, hijri_to_gregorian, umm_al_qura_offset, JulianDayNumber};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let now = Utc::now().with_timezone(&umm_al_qura_offset());
    let today = gregorian_to_hijri(&now);
    let jdn = JulianDayNumber::from_naive_date(now.date_naive());

    println!("Gregorian: {now}");
    println!("JDN: {jdn}");
    println!(
        "Hijri (arithmetic): {} {:?} {} ({:?})",
        today.day(),
        today.month(),
        today.year(),
        today.weekday()
    );
    match hijri_to_gregorian(&today) {
        Ok(back) => println!("Umm al-Qura: {back}"),
        Err(err) => println!("Umm al-Qura: {err}"),
    }
}
