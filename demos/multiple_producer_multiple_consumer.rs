use std::{thread, time::Duration};
use ucast::{Channel, Consumer, Producer};

fn produce(producer: Producer<String>, name: &str) {
    let mut i = 0;
    loop {
        i += 1;

        // Sending string message with producer name to all consumers
        producer.send(format!("{} Message {}", name, i));

        thread::sleep(Duration::from_millis(1000));
    }
}

fn consume(consumer: Consumer<String>, name: &str) {
    loop {
        // Receiving message from producers
        let message = consumer.recv();

        println!("{} Received: {}", name, message);
    }
}

fn main() {
    // Creating a string channel
    let channel = Channel::new();

    // Getting producer and consumer objects
    let producer1 = channel.producer();
    let producer2 = channel.producer();
    let consumer1 = channel.consumer();
    let consumer2 = channel.consumer();

    // Passing producer objects to producer threads
    let producer1_thread = thread::spawn(move || produce(producer1, "Producer1"));
    let producer2_thread = thread::spawn(move || produce(producer2, "Producer2"));

    // Passing consumer objects to consumer threads
    let consumer1_thread = thread::spawn(move || consume(consumer1, "Consumer1"));
    let consumer2_thread = thread::spawn(move || consume(consumer2, "Consumer2"));

    producer1_thread.join().unwrap();
    producer2_thread.join().unwrap();
    consumer1_thread.join().unwrap();
    consumer2_thread.join().unwrap();
}
