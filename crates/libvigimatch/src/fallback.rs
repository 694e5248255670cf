use jiff::civil::date;

use crate::model::AlertRecord;

/// Bundled safety notices used whenever the live feed is unavailable.
pub fn alerts() -> Vec<AlertRecord> {
  vec![
    AlertRecord::builder("Leqembi")
      .alert_date(date(2025, 11, 1))
      .title("Leqembi (lecanemab) Drug Safety Communication: MRI monitoring to reduce ARIA risk")
      .ingredient("lecanemab")
      .form("100 mg/mL 注射液")
      .risk_summary("阿茲海默症 ARIA：APOE ε4 攜帶者風險增加")
      .action_summary("建議基因檢測")
      .excerpt("FDA recommends MRI monitoring to reduce ARIA risk, especially in APOE ε4 carriers.")
      .build(),
    AlertRecord::builder("Prolia")
      .alert_date(date(2025, 10, 15))
      .title("Prolia (denosumab) Drug Safety Communication: severe hypocalcemia in dialysis patients")
      .ingredient("denosumab")
      .form("60 mg/1 mL 注射液")
      .risk_summary("嚴重低血鈣：洗腎病人風險增加")
      .action_summary("建議監測血鈣")
      .excerpt("Risk of severe hypocalcemia in dialysis patients receiving denosumab.")
      .build(),
    AlertRecord::builder("Ocaliva")
      .alert_date(date(2025, 9, 30))
      .title("Ocaliva (obeticholic acid) Drug Safety Communication: serious liver injury")
      .ingredient("obeticholic acid")
      .form("5 mg 錠劑")
      .risk_summary("原發性膽汁性肝硬化：晚期肝病病人風險增加")
      .action_summary("建議調整劑量")
      .excerpt("Serious liver injury reported in non-cirrhotic PBC patients treated with obeticholic acid.")
      .build(),
  ]
}

#[cfg(test)]
mod tests {
  #[test]
  fn titles_are_unique_and_extractable() {
    let alerts = super::alerts();
    let titles = alerts.iter().map(|alert| alert.title.as_str()).collect::<std::collections::HashSet<_>>();

    assert_eq!(titles.len(), alerts.len());

    for alert in &alerts {
      let (product, ingredient) = crate::fetcher::extract_product_and_ingredient(&alert.title);

      assert_eq!(product, alert.product_name);
      assert_eq!(ingredient, alert.ingredient);
    }
  }
}
