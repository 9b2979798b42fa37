//! Property tests for the MGF parser.
//!
//! Inputs are generated as structured spectra, rendered to MGF text, and
//! parsed back; the structural invariants of the output must hold for every
//! generated input.

use proptest::prelude::*;

use mgfpeak::mgf::MgfParser;

#[derive(Debug, Clone)]
struct SpectrumCase {
    title: String,
    retention_time: Option<f64>,
    pepmass: Option<f64>,
    fragments: Vec<(f64, f64)>,
}

fn spectrum_case() -> impl Strategy<Value = SpectrumCase> {
    (
        "[A-Za-z][A-Za-z0-9 _.:-]{0,24}",
        proptest::option::of(0.0f64..1e5),
        proptest::option::of(50.0f64..5e3),
        proptest::collection::vec((1.0f64..1e4, 0.0f64..1e9), 0..30),
    )
        .prop_map(|(title, retention_time, pepmass, fragments)| SpectrumCase {
            title,
            retention_time,
            pepmass,
            fragments,
        })
}

fn render(cases: &[SpectrumCase], crlf: bool) -> String {
    let mut text = String::new();
    for case in cases {
        text.push_str("BEGIN IONS\n");
        text.push_str(&format!("TITLE={}\n", case.title));
        if let Some(rt) = case.retention_time {
            text.push_str(&format!("RTINSECONDS={}\n", rt));
        }
        if let Some(pepmass) = case.pepmass {
            text.push_str(&format!("PEPMASS={}\n", pepmass));
        }
        for (mz, intensity) in &case.fragments {
            text.push_str(&format!("{} {}\n", mz, intensity));
        }
        text.push_str("END IONS\n");
    }
    if crlf {
        text.replace('\n', "\r\n")
    } else {
        text
    }
}

proptest! {
    #[test]
    fn structural_invariants_hold(
        cases in proptest::collection::vec(spectrum_case(), 0..20),
        crlf in any::<bool>(),
    ) {
        let text = render(&cases, crlf);
        let parsed = MgfParser::new()
            .parse(text.as_bytes(), Some(text.len() as u64))
            .expect("generated input is well-formed");

        // One spectrum row per block, in declaration order.
        prop_assert_eq!(parsed.spectra.len(), cases.len());

        // Ranges are contiguous, non-overlapping, and sized to the block.
        let mut next_first = 1i64;
        for (i, case) in cases.iter().enumerate() {
            let first = parsed.spectra.first_entry[i];
            let last = parsed.spectra.last_entry[i];
            prop_assert_eq!(first, next_first);
            prop_assert_eq!(last - first + 1, case.fragments.len() as i64);
            next_first = last + 1;
        }
        prop_assert_eq!(next_first - 1, parsed.fragments.len() as i64);

        // Values survive the text round trip exactly.
        for (i, case) in cases.iter().enumerate() {
            prop_assert_eq!(&parsed.spectra.title[i], &case.title);
            prop_assert_eq!(parsed.spectra.retention_time[i], case.retention_time);
            prop_assert_eq!(parsed.spectra.pepmass[i], case.pepmass);
        }
        let flat: Vec<(f64, f64)> = cases
            .iter()
            .flat_map(|c| c.fragments.iter().copied())
            .collect();
        let observed: Vec<(f64, f64)> = parsed
            .fragments
            .mz
            .iter()
            .copied()
            .zip(parsed.fragments.intensity.iter().copied())
            .collect();
        prop_assert_eq!(observed, flat);
    }

    #[test]
    fn parse_is_deterministic(
        cases in proptest::collection::vec(spectrum_case(), 0..10),
    ) {
        let text = render(&cases, false);
        let first = MgfParser::new().parse(text.as_bytes(), None).unwrap();
        let second = MgfParser::new().parse(text.as_bytes(), None).unwrap();
        prop_assert_eq!(first, second);
    }
}
