quantity!(Hours, via: f64, suffix: "h", precision: 1);

quantity!(
    /// Calendar months, the billing duration unit.
    Months, via: f64, suffix: "mo", precision: 1
);
