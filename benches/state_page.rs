// benches/state_page.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };

use pl_scrape::{ config::options::TargetOptions, specs };

// A large state page (California-sized) built in memory.
fn sample_doc(rows: usize) -> String {
    let mut body = String::with_capacity(rows * 160);
    for i in 0..rows {
        let phone = if i % 7 == 0 { String::new() } else { format!("555-01{:02}", i % 100) };
        body.push_str(&format!(
            "<tr><td>City {i}</td><td>Branch Library {i}</td><td>{i} Main St</td>\
             <td>{:05}</td><td>{phone}</td></tr>",
            90000 + i
        ));
    }
    format!(
        "<html><body><h1>California Public Libraries</h1>\
         <table id=\"libraries\"><tbody>{body}</tbody></table></body></html>"
    )
}

fn bench_state_page(c: &mut Criterion) {
    let doc = sample_doc(1_200);
    let target = TargetOptions::default();
    let url = "https://publiclibraries.com/state/california/";

    c.bench_function("state_page_parse", |b| {
        b.iter(|| {
            let page = specs::state_page::parse(black_box(&doc), url, &target)
                .expect("sample parses");
            black_box(page.libraries.len())
        })
    });
}

criterion_group!(benches, bench_state_page);
criterion_main!(benches);
