use crate::autograd::backward_op::OpKind;
use crate::value::Value;

#[test]
fn test_deep_chain_backward_then_drop() {
    let x = Value::new(0.0);
    let mut y = x.clone();
    for _ in 0..200_000 {
        y = &y + 1.0;
    }
    y.backward();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(y.data(), 200_000.0);
    drop(y);
    // The leaf outlives the chain it fed.
    assert_eq!(x.data(), 0.0);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_deep_sum_drop() {
    let xs = Value::from_slice(&vec![0.5; 100_000]);
    let loss: Value = xs.iter().sum();
    loss.backward();
    assert_eq!(loss.data(), 50_000.0);
    assert!(xs.iter().all(|x| x.grad() == 1.0));
    drop(loss);
    assert!(xs.iter().all(|x| x.is_leaf()));
}

#[test]
fn test_drop_keeps_externally_held_nodes_intact() {
    let a = Value::new(2.0);
    let b = &a * &a;
    let c = b.tanh();
    drop(c);
    assert_eq!(b.op(), Some(OpKind::Mul));
    let operands = b.operands();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&a));
    assert_eq!(b.data(), 4.0);
}

#[test]
fn test_is_leaf_record() {
    let a = Value::new(1.0);
    assert!(a.read_data().is_leaf());
    let b = a.exp();
    assert!(!b.read_data().is_leaf());
}
