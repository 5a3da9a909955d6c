//! End-to-end ranking of the six-node reference graph
//!
//! a→{c,d,f}, b→{c,f}, c→{d,f}, d→{b,c}, e→{a}, f→{e}

use linkrank::iteration::l2_norm;
use linkrank::{analyze, Graph, Hits, PageRank};

fn reference_graph() -> Graph {
    Graph::new(
        vec!["a", "b", "c", "d", "e", "f"],
        vec![
            vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        ],
    )
    .unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < tol, "index {i}: {a} vs {e}");
    }
}

#[test]
fn test_reference_graph_shape() {
    let graph = reference_graph();
    assert_eq!(graph.out_degrees(), &[3.0, 2.0, 2.0, 2.0, 1.0, 1.0]);
    assert!(graph.dangling_nodes().is_empty());
    assert_eq!(graph.num_edges(), 11);
}

#[test]
fn test_pagerank_reference_scores() {
    let result = PageRank::new().run(&reference_graph()).unwrap();

    assert!(result.converged);
    assert!(result.iterations < 100);
    assert_eq!(result.iterations, 23);
    assert_close(
        &result.scores,
        &[0.186551, 0.091079, 0.182643, 0.155479, 0.190060, 0.194188],
        1e-5,
    );

    let order: Vec<&str> = result.ranking().into_iter().map(|(l, _)| l).collect();
    assert_eq!(order, vec!["f", "e", "a", "c", "d", "b"]);
}

#[test]
fn test_pagerank_mass_preserved_without_dangling_nodes() {
    let result = PageRank::new().run(&reference_graph()).unwrap();

    assert!((result.mass - 1.0).abs() < 1e-9);
    assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
}

#[test]
fn test_pagerank_is_bit_identical_across_runs() {
    let graph = reference_graph();
    let pr = PageRank::new();

    let first = pr.run(&graph).unwrap();
    let second = pr.run(&graph).unwrap();

    assert_eq!(first.iterations, second.iterations);
    for (a, b) in first.scores.iter().zip(&second.scores) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_pagerank_tighter_tolerance() {
    let graph = reference_graph();
    let loose = PageRank::new().run(&graph).unwrap();
    let tight = PageRank::new().with_tolerance(1e-9).run(&graph).unwrap();

    assert!(tight.converged);
    assert_eq!(tight.iterations, 35);
    assert!(tight.iterations >= loose.iterations);
}

#[test]
fn test_pagerank_single_iteration_not_converged() {
    let result = PageRank::new()
        .with_max_iterations(1)
        .run(&reference_graph())
        .unwrap();

    assert_eq!(result.iterations, 1);
    assert!(!result.converged);
}

#[test]
fn test_hits_reference_scores() {
    let result = Hits::new().run(&reference_graph()).unwrap();

    assert!(result.converged);
    assert_eq!(result.iterations, 13);
    assert_close(
        &result.hubs,
        &[0.684439, 0.501536, 0.446890, 0.283360, 0.0, 0.0],
        1e-5,
    );
    assert_close(
        &result.authorities,
        &[0.0, 0.113935, 0.590796, 0.454889, 0.0, 0.656548],
        1e-5,
    );

    let best_hub = result.hub_ranking()[0].0;
    let best_authority = result.authority_ranking()[0].0;
    assert_eq!(best_hub, "a");
    assert_eq!(best_authority, "f");
}

#[test]
fn test_hits_unit_norm_and_non_negative() {
    let result = Hits::new().run(&reference_graph()).unwrap();

    assert!((l2_norm(&result.hubs) - 1.0).abs() < 1e-9);
    assert!((l2_norm(&result.authorities) - 1.0).abs() < 1e-9);
    assert!(result.hubs.iter().all(|&x| x >= 0.0));
    assert!(result.authorities.iter().all(|&x| x >= 0.0));
    assert!(result.hub_delta < 1e-6);
    assert!(result.authority_delta < 1e-6);
}

#[test]
fn test_hits_tighter_tolerance() {
    let graph = reference_graph();
    let loose = Hits::new().run(&graph).unwrap();
    let tight = Hits::new().with_tolerance(1e-9).run(&graph).unwrap();

    assert_eq!(tight.iterations, 19);
    assert!(tight.iterations >= loose.iterations);
}

#[test]
fn test_hits_idempotent() {
    let graph = reference_graph();
    assert_eq!(Hits::new().run(&graph).unwrap(), Hits::new().run(&graph).unwrap());
}

#[test]
fn test_side_by_side_analysis() {
    let graph = reference_graph();
    let analysis = analyze(&graph, &PageRank::new(), &Hits::new()).unwrap();

    assert_eq!(analysis.pagerank.top_n(1)[0].0, "f");
    assert_eq!(analysis.hits.authority_ranking()[0].0, "f");
}

#[test]
fn test_reference_graph_from_json() {
    let graph = Graph::from_json(
        r#"{
            "labels": ["a", "b", "c", "d", "e", "f"],
            "adjacency": [
                [0, 0, 1, 1, 0, 1],
                [0, 0, 1, 0, 0, 1],
                [0, 0, 0, 1, 0, 1],
                [0, 1, 1, 0, 0, 0],
                [1, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 1, 0]
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        PageRank::new().run(&graph).unwrap(),
        PageRank::new().run(&reference_graph()).unwrap()
    );
}
