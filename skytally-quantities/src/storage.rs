quantity!(
    /// Data volume in gigabytes.
    Gigabytes, via: f64, suffix: "GB", precision: 0
);
