use std::{thread, time::Duration};
use ucast::{Channel, Consumer, Producer};

fn produce(producer: Producer<String>) {
    let mut i = 0;
    loop {
        i += 1;

        // Sending string message to the consumer
        producer.send(format!("Message {}", i));

        thread::sleep(Duration::from_millis(1000));
    }
}

fn consume(consumer: Consumer<String>) {
    loop {
        // Receiving message from the producer
        let message = consumer.recv();

        println!("Received: {}", message);
    }
}

fn main() {
    // Creating a string channel
    let channel = Channel::new();

    // Getting producer and consumer objects
    let producer = channel.producer();
    let consumer = channel.consumer();

    // Passing producer object to the first thread
    let produce_thread = thread::spawn(move || produce(producer));

    // Passing consumer object to the second thread
    let consume_thread = thread::spawn(move || consume(consumer));

    produce_thread.join().unwrap();
    consume_thread.join().unwrap();
}
