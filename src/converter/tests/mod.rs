//! Scenario tests for the converters
//!
//! Each test writes small CSV fixtures into a temp directory and checks the
//! JSON document (or error) produced from them.

pub mod error_handling;

use crate::converter::police::PoliceSources;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SHELTER_HEADER: &str = "市町村コード,都道府県名及び市町村名,NO,施設・場所名,住所,洪水,崖崩れ、土石流及び地滑り,高潮,地震,津波,大規模な火事,内水氾濫,火山現象,指定避難所との住所同一,緯度,経度,備考";

pub const HONBU_HEADER: &str =
    "名称,都道府県,電話番号,郵便番号,市区町村,全国地方公共団体コード,全体表記,町又は大字以降,備考,longitude,latitude,isTrustful";

pub const KEISATSUSHO_HEADER: &str = "名称,フリガナ,警察本部名称,都道府県,電話番号,郵便番号,市区町村,全国地方公共団体コード,全体表記,町又は大字以降,備考,Longitude,Latitude,isTrustful";

pub const KOBAN_HEADER: &str = "名称,交番・駐在所頭名（フリガナ）,警察署名称,都道府県名,電話番号,郵便番号,市区町村,全国地方公共団体コード,全体表記,町又は大字以降,longitude,latitude,isTrustful";

/// Write `header` and `rows` as a CSV file under `dir`
pub fn write_csv<R: AsRef<str>>(dir: &Path, name: &str, header: &str, rows: &[R]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(header);
    for row in rows {
        content.push('\n');
        content.push_str(row.as_ref());
    }
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

pub fn honbu_row(name: &str, lon: &str, lat: &str, trust: &str) -> String {
    format!(
        "{name},東京都,03-3581-4321,100-8929,千代田区,131016,東京都千代田区霞が関2-1-1,霞が関2-1-1,,{lon},{lat},{trust}"
    )
}

pub fn keisatsusho_row(name: &str, honbu: &str) -> String {
    format!(
        "{name},ケイサツショ,{honbu},東京都,03-3213-0110,100-0005,千代田区,131016,東京都千代田区丸の内1-9-2,丸の内1-9-2,,139.7671,35.6812,1"
    )
}

pub fn koban_row(name: &str, keisatsusho: &str) -> String {
    format!(
        "{name},コウバン,{keisatsusho},東京都,03-0000-0000,100-0005,千代田区,131016,東京都千代田区丸の内2-1,丸の内2-1,139.7650,35.6800,0"
    )
}

/// Paths for the three police tiers inside `temp_dir`, none created
pub fn police_sources(temp_dir: &TempDir) -> PoliceSources {
    PoliceSources {
        honbu: temp_dir.path().join("honbu.csv"),
        keisatsusho: temp_dir.path().join("keisatsusho.csv"),
        koban: temp_dir.path().join("koban.csv"),
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
