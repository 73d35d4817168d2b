use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 6;

/// `RC-<unix millis>-<6 base-36 characters, uppercase>`
pub fn generate_case_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("RC-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Short reference handed out by the quick start form: `RCA-<last 6 digits of unix millis>`
pub fn generate_quick_case_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("RCA-{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn case_id_shape() {
        let pattern = Regex::new(r"^RC-\d+-[0-9A-Z]{6}$").unwrap();
        for _ in 0..50 {
            let id = generate_case_id();
            assert!(pattern.is_match(&id), "unexpected id {}", id);
        }
    }

    #[test]
    fn quick_case_id_shape() {
        let pattern = Regex::new(r"^RCA-\d{6}$").unwrap();
        assert!(pattern.is_match(&generate_quick_case_id()));
    }
}
