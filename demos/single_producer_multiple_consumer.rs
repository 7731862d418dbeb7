use std::{thread, time::Duration};
use ucast::{Channel, Consumer, Producer};

fn produce(producer: Producer<String>) {
    let mut i = 0;
    loop {
        i += 1;

        // Sending string message to all consumers
        producer.send(format!("Message {}", i));

        thread::sleep(Duration::from_millis(1000));
    }
}

fn consume(consumer: Consumer<String>, name: &str) {
    loop {
        // Receiving message from the producer
        let message = consumer.recv();

        println!("{} Received: {}", name, message);
    }
}

fn main() {
    // Creating a string channel
    let channel = Channel::new();

    // Getting producer and consumer objects
    let producer = channel.producer();
    let consumer1 = channel.consumer();
    let consumer2 = channel.consumer();

    // Passing producer object to the first thread
    let produce_thread = thread::spawn(move || produce(producer));

    // Passing consumer objects to other threads
    let consume1_thread = thread::spawn(move || consume(consumer1, "Consumer1"));
    let consume2_thread = thread::spawn(move || consume(consumer2, "Consumer2"));

    produce_thread.join().unwrap();
    consume1_thread.join().unwrap();
    consume2_thread.join().unwrap();
}
