use approx::assert_relative_eq;
use property_forecast::data::{PropertyHistory, PropertyRecord};
use property_forecast::{
    project_property, DataLoader, Metric, ProjectionConfig, Scenario,
};

fn linear_history() -> PropertyHistory {
    let records = (0..4)
        .map(|i| PropertyRecord {
            property_name: "Riverside Tower".to_string(),
            year: 2020 + i,
            noi: 100.0 + 10.0 * i as f64,
            occupancy: 94.0 + i as f64,
            value: 1000.0 + 50.0 * i as f64,
            dscr: Some(1.25),
        })
        .collect();

    PropertyHistory::new("Riverside Tower", records).unwrap()
}

#[test]
fn test_project_property_end_to_end() {
    let history = linear_history();
    let outlook = project_property(&history, &ProjectionConfig::new(2).unwrap()).unwrap();

    assert_eq!(outlook.property_name(), "Riverside Tower");
    assert_eq!(outlook.future_years(), &[2024, 2025]);

    let scenarios = outlook.scenarios();
    assert_eq!(scenarios.years(), vec![2024, 2025]);

    let noi_base = scenarios.column(Metric::Noi, Scenario::Base);
    assert_relative_eq!(noi_base[0], 140.0, epsilon = 1e-9);
    assert_relative_eq!(noi_base[1], 150.0, epsilon = 1e-9);

    let noi_up = scenarios.column(Metric::Noi, Scenario::Upside);
    assert_relative_eq!(noi_up[0], 147.0, epsilon = 1e-9);
    assert_relative_eq!(noi_up[1], 157.5, epsilon = 1e-9);

    // occupancy 98, 99 -> upside 99.96, then capped
    let occ_up = scenarios.column(Metric::Occupancy, Scenario::Upside);
    assert_relative_eq!(occ_up[0], 99.96, epsilon = 1e-9);
    assert_eq!(occ_up[1], 100.0);

    let value = outlook.projection(Metric::Value);
    assert_relative_eq!(value.model.slope(), 50.0, epsilon = 1e-9);
    assert_eq!(value.forecast.indices(), vec![4, 5]);
}

#[test]
fn test_default_horizon_is_five_years() {
    let outlook = project_property(&linear_history(), &ProjectionConfig::default()).unwrap();

    assert_eq!(outlook.scenarios().len(), 5);
    assert_eq!(outlook.future_years(), &[2024, 2025, 2026, 2027, 2028]);
}

#[test]
fn test_zero_horizon_rejected() {
    let config = ProjectionConfig { years_forward: 0 };
    let err = project_property(&linear_history(), &config).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_single_year_history_projects_flat() {
    let record = PropertyRecord {
        property_name: "New Build".to_string(),
        year: 2023,
        noi: 50.0,
        occupancy: 80.0,
        value: 900.0,
        dscr: None,
    };
    let history = PropertyHistory::new("New Build", vec![record]).unwrap();

    let outlook = project_property(&history, &ProjectionConfig::new(3).unwrap()).unwrap();

    assert_eq!(
        outlook.scenarios().column(Metric::Noi, Scenario::Base),
        vec![50.0, 50.0, 50.0]
    );
    assert_eq!(outlook.future_years(), &[2024, 2025, 2026]);
}

#[test]
fn test_chart_series() {
    let outlook = project_property(&linear_history(), &ProjectionConfig::new(2).unwrap()).unwrap();
    let chart = outlook.chart_series(Metric::Value);

    assert_eq!(chart.title, "Property Value Projection – Riverside Tower");
    assert_eq!(chart.y_label, "Value");
    assert_eq!(chart.historical.len(), 4);
    assert_eq!(chart.historical[0], (2020, 1000.0));

    let labels: Vec<&str> = chart.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Base Case", "Downside", "Upside"]);

    let upside = &chart.lines[2];
    assert_eq!(upside.points.len(), 2);
    assert_eq!(upside.points[0].0, 2024);
    assert_relative_eq!(upside.points[0].1, 1200.0 * 1.08, epsilon = 1e-9);

    assert_eq!(outlook.chart_series(Metric::Occupancy).y_label, "Occupancy %");
}

#[test]
fn test_csv_to_outlook_json() {
    let csv = "\
Property Name,Year,NOI,Occupancy,Value
Cedar Park,2022,210,91,3100
Cedar Park,2020,190,89,2900
Cedar Park,2021,200,90,3000
";
    let portfolio = DataLoader::from_reader(csv.as_bytes()).unwrap();
    let history = portfolio.property_history("Cedar Park").unwrap();
    let outlook = project_property(&history, &ProjectionConfig::new(1).unwrap()).unwrap();

    let row = outlook.scenarios().rows()[0];
    assert_eq!(row.year, 2023);
    assert_relative_eq!(row.noi_base, 220.0, epsilon = 1e-9);
    assert_relative_eq!(row.value_down, 3200.0 * 0.9, epsilon = 1e-9);

    let json: serde_json::Value = serde_json::from_str(&outlook.to_json().unwrap()).unwrap();
    assert_eq!(json["scenarios"]["rows"][0]["Year"], 2023);
    assert_eq!(json["future_years"][0], 2023);
}

#[test]
fn test_projections_run_on_worker_threads() {
    let histories = vec![linear_history(), linear_history()];

    let handles: Vec<_> = histories
        .into_iter()
        .map(|history| {
            std::thread::spawn(move || {
                project_property(&history, &ProjectionConfig::default())
                    .map(|outlook| outlook.scenarios().clone())
            })
        })
        .collect();

    let tables: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(tables[0], tables[1]);
}
