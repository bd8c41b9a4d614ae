use calctty::memory::{MemoryBank, MemoryEvent, CAPACITY};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_list_drops_oldest_when_full() {
    let mut memory = MemoryBank::new();
    for i in 1..=11 {
        memory.add_to_list(i as f64);
    }

    assert_eq!(memory.list_size(), CAPACITY);
    assert_eq!(memory.list_value(0), Some(11.0));
    assert_eq!(memory.list_value(CAPACITY - 1), Some(2.0));
    assert!(!memory.get_memory_list().contains(&1.0));
}

#[test]
fn test_out_of_range_recall_is_a_no_op() {
    let mut memory = MemoryBank::new();
    memory.store(3.0);
    memory.add_to_list(9.0);

    memory.recall_from_list(5);
    assert_eq!(memory.value(), 3.0);

    memory.recall_from_list(0);
    assert_eq!(memory.value(), 9.0);
}

#[test]
fn test_add_then_subtract_empties_memory() {
    let mut memory = MemoryBank::new();
    memory.add(5.0);
    assert!(memory.has_value());
    memory.subtract(5.0);
    assert!(!memory.has_value());
    assert_eq!(memory.recall(), 0.0);
}

#[test]
fn test_events() {
    let mut memory = MemoryBank::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    memory.subscribe(move |event| sink.borrow_mut().push(*event));

    memory.store(2.0);
    memory.add_to_list(2.0);
    memory.remove_from_list(0);
    memory.clear();

    assert_eq!(
        *events.borrow(),
        vec![
            MemoryEvent::ValueChanged { has_value: true },
            MemoryEvent::ListChanged { len: 1 },
            MemoryEvent::ListChanged { len: 0 },
            MemoryEvent::ValueChanged { has_value: false },
        ]
    );
}
