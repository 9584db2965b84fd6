#[cfg(test)]

mod test {
    use super::super::*;
    use std::io::Write;

    fn prices_csv(sep: char) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Symbol{sep}Date{sep}Close{sep}Dividends").unwrap();
        writeln!(file, "A{sep}2023-01-02{sep}100.0{sep}0.0").unwrap();
        writeln!(file, "A{sep}2023-12-29{sep}150.0{sep}0.0").unwrap();
        writeln!(file, "B{sep}2023-01-02{sep}0.0{sep}0.0").unwrap();
        writeln!(file, "B{sep}2023-12-29{sep}5.0{sep}0.0").unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = prices_csv(';');
        let loader = Loader::init(file.path().to_str().unwrap());
        let data = loader.load_csv(b';', true).unwrap().collect().unwrap();
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 4);
        assert_eq!(
            data.get_column_names(),
            &["Symbol", "Date", "Close", "Dividends"]
        );
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let file = prices_csv(',');
        let loader = Loader::init(file.path().to_str().unwrap());
        let data = loader.load(b',', true).unwrap().collect().unwrap();
        assert_eq!(data.height(), 4);
    }

    #[test]
    fn test_csv_separator() {
        assert_eq!(csv_separator(',').unwrap(), b',');
        assert_eq!(csv_separator('\t').unwrap(), b'\t');
        assert!(matches!(
            csv_separator('é'),
            Err(PipelineError::InvalidSeparator('é'))
        ));
        assert!(matches!(
            csv_separator('€'),
            Err(PipelineError::InvalidSeparator('€'))
        ));
    }

    #[test]
    fn test_load_parquet_rejects_csv() {
        let loader = Loader::init("prices.csv");
        assert_eq!(loader.path(), "prices.csv");
        let result = loader.load_parquet(ScanArgsParquet::default());
        assert!(matches!(result, Err(PipelineError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_csv_rejects_other_extensions() {
        let loader = Loader::init("prices.txt");
        let result = loader.load_csv(b',', true);
        assert!(matches!(result, Err(PipelineError::UnsupportedFormat(_))));
    }
}
