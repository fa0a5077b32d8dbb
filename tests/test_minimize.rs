//! Integration tests for the full truth-table minimization pipeline
//!
//! These exercise the public API end to end: parsing, per-output
//! minimization, expression rendering, and Verilog emission.

use qm_logic::{verilog, Cover, Implicant, MinimizerConfig, Sop, TruthTable};

#[test]
fn test_single_minterm_expression() {
    let table: TruthTable = "0001".parse().unwrap();
    let results = table.minimize().unwrap();
    assert_eq!(Sop::from_cover(&results[0].cover).to_string(), "x0 & x1");
}

#[test]
fn test_irrelevant_variable_is_dropped() {
    // On-set {1, 3}: x1 is irrelevant, the function is just x0
    let table: TruthTable = "0101".parse().unwrap();
    let results = table.minimize().unwrap();
    assert_eq!(Sop::from_cover(&results[0].cover).to_string(), "x0");
}

#[test]
fn test_or_expression() {
    let table: TruthTable = "0111".parse().unwrap();
    let results = table.minimize().unwrap();
    assert_eq!(Sop::from_cover(&results[0].cover).to_string(), "(x1) | (x0)");
}

#[test]
fn test_constant_expressions() {
    let table: TruthTable = "0000\n1111".parse().unwrap();
    let results = table.minimize().unwrap();
    assert_eq!(Sop::from_cover(&results[0].cover), Sop::Constant(false));
    assert_eq!(Sop::from_cover(&results[1].cover), Sop::Constant(true));
}

#[test]
fn test_three_input_adder_carry() {
    // Carry-out of a full adder: majority of three inputs
    let table: TruthTable = "00010111".parse().unwrap();
    let results = table.minimize().unwrap();
    let cover = &results[0].cover;
    assert!(results[0].stall.is_none());
    assert_eq!(cover.len(), 3);
    assert_eq!(cover.covered_minterms(), vec![3, 5, 6, 7]);
    for imp in cover.implicants() {
        assert_eq!(imp.literal_count(3), 2);
    }
}

#[test]
fn test_three_input_adder_sum_is_parity() {
    // Parity admits no merging at all: four on-set minterms stay four
    // full-literal cubes
    let table: TruthTable = "01101001".parse().unwrap();
    let results = table.minimize().unwrap();
    let cover = &results[0].cover;
    assert_eq!(cover.len(), 4);
    for imp in cover.implicants() {
        assert_eq!(imp.literal_count(3), 3);
    }
}

#[test]
fn test_soundness_of_every_selected_implicant() {
    let table: TruthTable = "0111101011001010".parse().unwrap();
    let on_set = table.on_set(0);
    let results = table.minimize().unwrap();
    for imp in results[0].cover.implicants() {
        for m in imp.expand(table.n_vars()) {
            assert!(on_set.contains(&m), "{:?} covers off-set minterm {}", imp, m);
        }
    }
    assert_eq!(results[0].cover.covered_minterms(), on_set);
}

#[test]
fn test_determinism_across_runs() {
    let text = "0110100110010110\n1111000011110000";
    let first = text.parse::<TruthTable>().unwrap().minimize().unwrap();
    let second = text.parse::<TruthTable>().unwrap().minimize().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_driver_preserves_output_order() {
    let text = "0110\n1000\n0111\n0001";
    let table: TruthTable = text.parse().unwrap();
    let config = MinimizerConfig {
        parallel: true,
        ..Default::default()
    };
    let results = table.minimize_with_config(&config).unwrap();
    assert_eq!(results.len(), 4);
    for (j, out) in results.iter().enumerate() {
        assert_eq!(out.index, j);
    }
    assert_eq!(results, table.minimize().unwrap());
}

#[test]
fn test_prime_implicants_of_cover_are_uncombinable() {
    let table: TruthTable = "0110100110010110".parse().unwrap();
    let primes = qm_logic::cover::prime_implicants(&table.on_set(0));
    for (i, a) in primes.iter().enumerate() {
        for b in primes.iter().skip(i + 1) {
            assert_eq!(a.combine(b), None);
        }
    }
}

#[test]
fn test_direct_cover_api_matches_driver() {
    let table: TruthTable = "00010111".parse().unwrap();
    let (cover, stall) = Cover::minimize(&table.on_set(0), table.n_vars());
    let results = table.minimize().unwrap();
    assert!(stall.is_none());
    assert_eq!(cover, results[0].cover);
}

#[test]
fn test_verilog_end_to_end() {
    let table: TruthTable = "0110\n0001".parse().unwrap();
    let results = table.minimize().unwrap();
    let mut buffer = Vec::new();
    verilog::write_verilog(&mut buffer, "half_adder", table.n_vars(), &results).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.starts_with("module half_adder (x0, x1, y0, y1);"));
    assert!(text.contains("assign y0 = (x0 & ~x1) | (~x0 & x1);"));
    assert!(text.contains("assign y1 = (x0 & x1);"));
    assert!(text.ends_with("endmodule\n"));
}

#[test]
fn test_implicant_round_trip_through_expression() {
    let imp = Implicant::new(0b0101, 0b1010);
    let term = qm_logic::Term::from_implicant(&imp, 4);
    assert_eq!(term.literals(), &[(0, true), (2, true)]);
    assert_eq!(term.to_string(), "x0 & x2");
}
